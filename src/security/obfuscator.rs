//! Reversible answer obfuscation bound to a per-session key.
//!
//! A token is the hex encoding of a small JSON payload carrying the
//! plaintext, the session key it was produced under, and a creation
//! timestamp. Decoding succeeds only when the presented key matches the
//! embedded one; every failure mode collapses to `None`.

use crate::models::{ObfuscatedQuestion, Question};
use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

const SESSION_KEY_LEN: usize = 24;

/// Random per-session obfuscation key. A fresh key per exam means tokens
/// from one session are useless in any other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionKey(String);

impl SessionKey {
    pub fn generate() -> Self {
        let key = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(SESSION_KEY_LEN)
            .map(char::from)
            .collect();
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Serialize, Deserialize)]
struct TokenPayload {
    data: String,
    key: String,
    timestamp: i64,
}

/// Produces an opaque token binding `plaintext` to `key`.
pub fn encode(plaintext: &str, key: &SessionKey) -> String {
    let payload = TokenPayload {
        data: plaintext.to_string(),
        key: key.0.clone(),
        timestamp: Utc::now().timestamp_millis(),
    };
    // Serializing a struct of strings and an integer cannot fail.
    let bytes = serde_json::to_vec(&payload).expect("token payload serializes");
    hex_encode(&bytes)
}

/// Recovers the plaintext from `token`, or `None` when the token is
/// malformed or was produced under a different key.
pub fn decode(token: &str, key: &SessionKey) -> Option<String> {
    let bytes = hex_decode(token)?;
    let payload: TokenPayload = serde_json::from_slice(&bytes).ok()?;
    if payload.key != key.0 {
        return None;
    }
    Some(payload.data)
}

/// Replaces a question's correct answer and explanation with tokens bound
/// to `key`. Prompt and options stay readable.
pub fn obfuscate_question(question: &Question, key: &SessionKey) -> ObfuscatedQuestion {
    ObfuscatedQuestion {
        id: question.id,
        kind: question.kind,
        difficulty: question.difficulty,
        prompt: question.prompt.clone(),
        options: question.options.clone(),
        correct_answer: encode(&question.correct_answer, key),
        explanation: encode(&question.explanation, key),
        points: question.points,
    }
}

fn hex_encode(bytes: &[u8]) -> String {
    use std::fmt::Write;
    bytes.iter().fold(
        String::with_capacity(bytes.len() * 2),
        |mut out, byte| {
            let _ = write!(out, "{byte:02x}");
            out
        },
    )
}

fn hex_decode(text: &str) -> Option<Vec<u8>> {
    // from_str_radix alone would tolerate signs like "+f"; tokens are
    // strictly hex digit pairs.
    if text.len() % 2 != 0 || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    (0..text.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(text.get(i..i + 2)?, 16).ok())
        .collect()
}
