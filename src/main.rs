mod app_router;
mod dom;
mod persisted_store;
mod yew_app;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = yew_app::mount() {
        dom::report("dice roller not mounted", &err);
    }
}
