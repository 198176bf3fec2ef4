//! Controladores
//!
//! Cada acción del usuario es un método: valida la entrada, aplica la
//! mutación sobre el libro (que persiste) y construye la respuesta.

pub mod expense_controller;
pub mod order_controller;
pub mod route_controller;
pub mod settings_controller;
pub mod shift_controller;
pub mod summary_controller;

pub use expense_controller::ExpenseController;
pub use order_controller::OrderController;
pub use route_controller::RouteController;
pub use settings_controller::SettingsController;
pub use shift_controller::ShiftController;
pub use summary_controller::SummaryController;
