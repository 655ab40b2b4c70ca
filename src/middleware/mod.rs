/*
 * Responsibility
 * - middleware の公開インターフェース (re-export)
 * - auth: bearer JWT gate, http: cross-cutting transport layers
 */
pub mod auth;
pub mod http;
