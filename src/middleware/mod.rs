/*
 * Responsibility
 * - Public interface of the middleware layer
 * - auth: bearer gate / cors: browser policy / http: transport infra
 */
pub mod auth;
pub mod cors;
pub mod http;
