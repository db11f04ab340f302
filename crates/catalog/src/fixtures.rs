//! Test helpers: JSON dataset builders and an in-memory log sink.

use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use tracing_subscriber::fmt::MakeWriter;

pub(crate) fn product(id: &str, name: &str, category: &str, status: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "tagline": "Intelligent Customer Support",
        "description": format!("{name} for modern teams."),
        "longDescription": format!("{name} in depth."),
        "features": ["Natural Language Processing", "Human Handoff"],
        "benefits": ["Reduce support costs by 60%"],
        "useCases": ["FAQ automation"],
        "pricing": {
            "startingPrice": "$99/month",
            "pricingModel": "Per conversation",
            "features": ["Unlimited conversations"]
        },
        "iconName": "MessageSquare",
        "gradient": "from-blue-500 to-cyan-400",
        "category": category,
        "status": status
    })
}

pub(crate) fn sub_brand(slug: &str, name: &str, products: Vec<Value>) -> Value {
    json!({
        "id": slug,
        "name": name,
        "fullName": format!("Simplx {name}"),
        "tagline": format!("{name} tagline"),
        "description": format!("{name} description"),
        "gradient": "from-blue-500 to-cyan-400",
        "iconName": "Users",
        "slug": slug,
        "products": products
    })
}

/// Two sub-brands covering every status, one shared category and a product id
/// reused across sub-brands.
pub(crate) fn sample_dataset() -> Value {
    json!([
        sub_brand(
            "cx",
            "CX",
            vec![
                product("ai-chatbot", "AI Chatbot Pro", "Customer Support", "available"),
                product("sentiment", "Sentiment Analyzer", "Analytics", "beta"),
                product("voice-agent", "Voice Agent", "Customer Support", "coming-soon"),
            ],
        ),
        sub_brand(
            "data",
            "Data",
            vec![
                product("dashboards", "Realtime Dashboard", "Visualization", "available"),
                product("sentiment", "Market Sentiment", "Analytics", "coming-soon"),
            ],
        ),
    ])
}

pub(crate) fn sample_json() -> String {
    sample_dataset().to_string()
}

/// In-memory log sink for asserting on emitted events.
#[derive(Clone, Default)]
pub(crate) struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Run `f` with a plain-text subscriber writing into this sink.
    pub(crate) fn capture<T>(&self, f: impl FnOnce() -> T) -> T {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }

    pub(crate) fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
