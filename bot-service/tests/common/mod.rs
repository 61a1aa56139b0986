use bot_service::{Scene, SceneContext, SceneOutcome, SceneRegistry, Session, SessionStorage, Stage, WebAppLinks};
use futures::future::BoxFuture;
use serde_json::json;
use shared::errors::Result;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use teloxide::dispatching::dialogue::Storage;
use teloxide::dptree::di::DependencyMap;
use teloxide::prelude::*;
use teloxide::types::Me;
use url::Url;

pub const CHAT_ID: i64 = 4242;


/// Scene that counts its invocations and answers with a fixed outcome.
#[derive(Clone)]
pub struct CountingScene {
    pub calls: Arc<AtomicUsize>,
    outcome: SceneOutcome,
    leave: bool,
}

impl CountingScene {
    pub fn new(outcome: SceneOutcome) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            outcome,
            leave: false,
        }
    }

    pub fn leaving() -> Self {
        Self {
            leave: true,
            ..Self::new(SceneOutcome::Handled)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Scene for CountingScene {
    fn handle(&self, ctx: SceneContext) -> BoxFuture<'static, Result<SceneOutcome>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let outcome = self.outcome;
        let leave = self.leave;
        Box::pin(async move {
            if leave {
                ctx.leave().await?;
            }
            Ok(outcome)
        })
    }
}


/// Bot pointed at a closed local port, so any outbound request fails fast.
pub fn offline_bot() -> Bot {
    let api_url = Url::parse("http://127.0.0.1:9/").expect("static url");
    Bot::new("123456:TEST").set_api_url(api_url)
}


pub fn me() -> Me {
    serde_json::from_value(json!({
        "id": 123456,
        "is_bot": true,
        "first_name": "Bodyline Marathons",
        "username": "marathons_bot",
        "can_join_groups": false,
        "can_read_all_group_messages": false,
        "supports_inline_queries": false,
        "can_connect_to_business": false,
        "has_main_web_app": false
    }))
    .expect("valid Me payload")
}


fn user(id: i64, first_name: &str, is_bot: bool) -> serde_json::Value {
    json!({ "id": id, "is_bot": is_bot, "first_name": first_name })
}

fn chat() -> serde_json::Value {
    json!({ "id": CHAT_ID, "type": "private", "first_name": "Анна" })
}


pub fn message_update(text: &str, with_sender: bool) -> Update {
    let mut message = json!({
        "message_id": 10,
        "date": 1_700_000_000,
        "chat": chat(),
        "text": text,
    });
    if with_sender {
        message["from"] = user(CHAT_ID, "Анна", false);
    }

    serde_json::from_str(&json!({ "update_id": 1, "message": message }).to_string())
        .expect("valid message update")
}


pub fn callback_update(data: &str) -> Update {
    serde_json::from_str(&json!({
        "update_id": 2,
        "callback_query": {
            "id": "cb-1",
            "from": user(CHAT_ID, "Анна", false),
            "chat_instance": "ci-1",
            "data": data,
            "message": {
                "message_id": 11,
                "date": 1_700_000_000,
                "chat": chat(),
                "from": user(123456, "Bodyline Marathons", true),
                "text": "Сколько тренировок в неделю?",
            }
        }
    }).to_string())
    .expect("valid callback update")
}


pub async fn storage_in_scene(scene: Option<&str>) -> Arc<SessionStorage> {
    let storage = SessionStorage::new();
    if let Some(name) = scene {
        storage
            .clone()
            .update_dialogue(ChatId(CHAT_ID), Session::in_scene(name))
            .await
            .expect("in-memory storage never fails");
    }
    storage
}


pub fn deps(update: Update, storage: Arc<SessionStorage>, registry: SceneRegistry) -> DependencyMap {
    let stage = Arc::new(Stage::new(registry));
    let links = Arc::new(WebAppLinks::new(shared::DEFAULT_MINI_APP_URL));
    dptree::deps![offline_bot(), update, storage, stage, links, me()]
}
