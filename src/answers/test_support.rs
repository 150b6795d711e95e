use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::error::ResolveError;
use super::http::Fetcher;

pub const ENDPOINT: &str = "http://wiki.test/api/rest_v1/page/summary";

/// Canned reply for one URL
#[derive(Clone, Debug)]
pub enum Reply {
    Text(String),
    Bytes(Vec<u8>),
    Refused,
    Status(u16),
}

/// Scripted fetcher that records every URL it is asked for
#[derive(Clone, Default)]
pub struct FakeFetcher {
    replies: Arc<Mutex<HashMap<String, Reply>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, url: &str, reply: Reply) -> Self {
        self.replies.lock().unwrap().insert(url.to_string(), reply);
        self
    }

    pub fn summary(self, keyword: &str, body: &str) -> Self {
        let url = format!("{}/{}", ENDPOINT, keyword);
        self.reply(&url, Reply::Text(body.to_string()))
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn lookup(&self, url: &str) -> Result<Reply, ResolveError> {
        self.calls.lock().unwrap().push(url.to_string());
        match self.replies.lock().unwrap().get(url).cloned() {
            Some(Reply::Refused) | None => {
                Err(ResolveError::Network("Connection refused (os error 111)".to_string()))
            }
            Some(Reply::Status(code)) => Err(ResolveError::Status(code, url.to_string())),
            Some(reply) => Ok(reply),
        }
    }
}

impl Fetcher for FakeFetcher {
    fn get_text(&self, url: &str) -> Result<String, ResolveError> {
        match self.lookup(url)? {
            Reply::Text(text) => Ok(text),
            Reply::Bytes(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            _ => unreachable!(),
        }
    }

    fn get_bytes(&self, url: &str) -> Result<Vec<u8>, ResolveError> {
        match self.lookup(url)? {
            Reply::Text(text) => Ok(text.into_bytes()),
            Reply::Bytes(bytes) => Ok(bytes),
            _ => unreachable!(),
        }
    }
}

/// A valid 1x1 RGBA PNG
pub fn tiny_png() -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, 1, 1);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&[10, 20, 30, 255]).unwrap();
    }
    out
}
