//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
pub mod asset_list;
pub mod combo_box;
pub mod controls;
pub mod modal;
pub mod portal;
