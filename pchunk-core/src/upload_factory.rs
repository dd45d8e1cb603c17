use crate::config::UploadConfig;
use crate::error::Result;
use crate::upload::PasteBackend;
use crate::upload::http::{HttpParams, HttpPasteBackend};

pub enum Backend {
    Http,
}

pub fn open_backend(backend: Backend, cfg: &UploadConfig) -> Result<Box<dyn PasteBackend>> {
    match backend {
        Backend::Http => {
            let params = HttpParams {
                endpoint: cfg.endpoint.clone(),
                lang: cfg.lang.clone(),
                expire: cfg.expire.clone(),
                timeout: cfg.timeout(),
            };
            Ok(Box::new(HttpPasteBackend::new(params)?))
        }
    }
}
