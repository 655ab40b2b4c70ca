/*!
 * Authentication context extractors
 *
 * Responsibility:
 * - JWT gate が request extensions に載せた VerifiedClaims を handler に渡す
 *
 * Public API:
 * - ClaimsExtractor (gate 未適用なら 401)
 * - GroupsExtractor (失敗しない: 無ければ空)
 */

mod core;

pub use self::core::{ClaimsExtractor, GroupsExtractor};
