//! Tests for the authentication orchestration service
