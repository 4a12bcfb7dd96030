pub mod container;
pub mod preview;
pub mod ui;

pub use container::{ Container, ContainerProps };
pub use preview::{ PreviewDocument, PreviewDocumentProps, PreviewPage };
