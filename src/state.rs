/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - gate: JWT group gate (verifier + allow-list)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use crate::config::AppEnv;
use crate::services::auth::GroupGate;

#[derive(Clone, Debug)]
pub struct AppState {
    pub app_env: AppEnv,
    pub gate: GroupGate,
}

impl AppState {
    pub fn new(app_env: AppEnv, gate: GroupGate) -> Self {
        Self { app_env, gate }
    }
}
