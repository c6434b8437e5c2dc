use axum::Json;
use contracts::shared::app_info::AppInfo;

/// GET /api/version
pub async fn version() -> Json<AppInfo> {
    Json(AppInfo::current())
}
