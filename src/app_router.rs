use web_sys::UrlSearchParams;

use korokoro_core::{WidgetConfig, PAIRING_PARAM};

pub(crate) fn load_widget_config() -> WidgetConfig {
    let pairs = query_param(PAIRING_PARAM)
        .map(|value| (PAIRING_PARAM, value))
        .into_iter();
    let (config, errors) = WidgetConfig::from_query_pairs(pairs);
    for err in errors {
        gloo::console::warn!("ignoring url config", err.to_string());
    }
    config
}

fn query_param(name: &str) -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let params = UrlSearchParams::new_with_str(&search).ok()?;
    params.get(name)
}
