#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    Quit,
    SelectTab(usize),
    NextTab,
    PreviousTab,
    ToggleSettings,
}
