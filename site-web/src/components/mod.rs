pub mod daisy_ui;
pub mod site_footer;
