// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! JSON body extractor whose rejections use the `{error}` body

use axum::extract::FromRequest;

use super::errors::ApiError;

/// `axum::Json` with rejections converted into [`ApiError`]
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
