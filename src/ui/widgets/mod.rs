pub mod popups;
