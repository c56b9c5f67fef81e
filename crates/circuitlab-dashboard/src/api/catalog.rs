//! Static catalog endpoints: examples and selectable gates.

use axum::Json;
use circuitlab_ir::Example;

use crate::dto::GateView;

/// GET /api/examples - Names accepted by `/load_example`.
pub async fn list_examples() -> Json<Vec<&'static str>> {
    Json(Example::all().iter().map(Example::name).collect())
}

/// GET /api/gates - Gates the user can add, in menu order.
pub async fn list_gates() -> Json<Vec<GateView>> {
    Json(GateView::selectable())
}
