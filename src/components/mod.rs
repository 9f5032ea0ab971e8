pub mod entry_form;
pub mod fab;
pub mod navigation;
pub mod templates;

pub use entry_form::FormComponent;
pub use fab::FabComponent;
pub use navigation::NavigationComponent;
pub use templates::TemplateComponent;
