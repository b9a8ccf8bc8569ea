pub mod use_modal;
