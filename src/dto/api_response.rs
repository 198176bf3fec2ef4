use serde::Serialize;

// Response genérica
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
    /// Hay al menos un pedido aceptado (sólo en respuestas de pedidos)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_available: Option<bool>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            route_available: None,
        }
    }

    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::success(data)
        }
    }

    pub fn with_route_available(mut self, available: bool) -> Self {
        self.route_available = Some(available);
        self
    }
}
