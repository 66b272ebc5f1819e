/// Side effects the event loop performs after the handler returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
}
