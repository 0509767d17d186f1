pub mod modal;
pub mod spinner;
pub mod stats_card;
pub mod tab_strip;
pub mod text_input;
pub mod top_bar;
