use std::collections::HashMap;

use gloo_net::http::Request;

use teamforge_shared::{
    ArtifactSet, Character, SuggestedTeam, TierEntry, WeaponInfo, index_by_id,
};

/// Fetch the full character roster.
pub async fn fetch_characters() -> Result<Vec<Character>, String> {
    let resp = Request::get("/api/characters")
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    resp.json::<Vec<Character>>()
        .await
        .map_err(|e| format!("parse error: {e}"))
}

/// Fetch a single character by id.
pub async fn fetch_character(id: &str) -> Result<Character, String> {
    let resp = Request::get(&format!("/api/character/{id}"))
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    resp.json::<Character>()
        .await
        .map_err(|e| format!("parse error: {e}"))
}

/// Fetch the suggested teams that include a given character.
pub async fn fetch_teams_for_character(id: &str) -> Result<Vec<SuggestedTeam>, String> {
    let resp = Request::get(&format!("/api/teams-for-character/{id}"))
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    resp.json::<Vec<SuggestedTeam>>()
        .await
        .map_err(|e| format!("parse error: {e}"))
}

/// Fetch the consolidated tier list.
pub async fn fetch_tier_list() -> Result<Vec<TierEntry>, String> {
    let resp = Request::get("/api/tierlist")
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    resp.json::<Vec<TierEntry>>()
        .await
        .map_err(|e| format!("parse error: {e}"))
}

#[derive(serde::Serialize)]
struct SuggestTeamRequest<'a> {
    owned_characters: &'a [String],
}

/// Request team suggestions for the owned-character set. A 4xx with an
/// `{"error": ...}` body surfaces the server's message directly.
pub async fn fetch_team_suggestions(owned: &[String]) -> Result<Vec<SuggestedTeam>, String> {
    let resp = Request::post("/api/suggest-team")
        .json(&SuggestTeamRequest {
            owned_characters: owned,
        })
        .map_err(|e| format!("encode error: {e}"))?
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        if let Ok(body) = resp.json::<serde_json::Value>().await {
            if let Some(message) = body.get("error").and_then(|m| m.as_str()) {
                return Err(message.to_string());
            }
        }
        return Err(format!("HTTP {}", resp.status()));
    }

    resp.json::<Vec<SuggestedTeam>>()
        .await
        .map_err(|e| format!("parse error: {e}"))
}

async fn fetch_artifacts_database() -> Result<Vec<ArtifactSet>, String> {
    let resp = Request::get("/api/artifacts-database")
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    resp.json::<Vec<ArtifactSet>>()
        .await
        .map_err(|e| format!("parse error: {e}"))
}

async fn fetch_weapons_database() -> Result<Vec<WeaponInfo>, String> {
    let resp = Request::get("/api/weapons-database")
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    resp.json::<Vec<WeaponInfo>>()
        .await
        .map_err(|e| format!("parse error: {e}"))
}

/// Fetch the artifact and weapon databases in parallel and index them by id.
/// Either failure fails the pair; callers degrade to tooltip-less rendering.
pub async fn fetch_reference_data()
-> Result<(HashMap<String, ArtifactSet>, HashMap<String, WeaponInfo>), String> {
    let (artifacts, weapons) = futures::join!(fetch_artifacts_database(), fetch_weapons_database());
    Ok((
        index_by_id(artifacts?, |a| a.id.as_str()),
        index_by_id(weapons?, |w| w.id.as_str()),
    ))
}
