// Services layer for business logic
// Services own the row-to-DTO conversion, calling the store directly

pub mod event;

pub use event::EventService;
