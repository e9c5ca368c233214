use actix_multipart::form::MultipartFormConfig;
use actix_web::web;

use crate::errors::AppError;

const MULTIPART_TOTAL_LIMIT: usize = 20 * 1024 * 1024;
const MULTIPART_MEMORY_LIMIT: usize = 2 * 1024 * 1024;

/// Extractor failures are rendered with the same JSON body as every other error.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::from(err).into()
    }));

    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::from(err).into()
    }));

    cfg.app_data(
        MultipartFormConfig::default()
            .total_limit(MULTIPART_TOTAL_LIMIT)
            .memory_limit(MULTIPART_MEMORY_LIMIT)
            .error_handler(|err, _req| AppError::from(err).into()),
    );
}
