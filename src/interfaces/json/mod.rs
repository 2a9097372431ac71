pub mod form_loader;
