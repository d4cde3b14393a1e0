mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn school_crud_round_trip() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let admin = common::admin_token();
    let user = common::user_token();

    let res = client
        .post(format!("{}/api/schools/post", server.base_url))
        .query(&[
            ("name", "Isla Vista Elementary"),
            ("address", "6875 El Colegio Rd"),
            ("description", "K-6 public school"),
        ])
        .bearer_auth(&admin)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let created = res.json::<Value>().await?;
    let id = created["id"].as_i64().unwrap();

    let res = client
        .get(format!("{}/api/schools", server.base_url))
        .query(&[("id", id.to_string())])
        .bearer_auth(&user)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, created);

    let res = client
        .put(format!("{}/api/schools", server.base_url))
        .query(&[("id", id.to_string())])
        .json(&json!({
            "id": id,
            "name": "Isla Vista Elementary",
            "address": "6875 El Colegio Rd",
            "description": "K-6 public school, GGUSD",
        }))
        .bearer_auth(&admin)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.json::<Value>().await?["description"],
        "K-6 public school, GGUSD"
    );

    let res = client
        .delete(format!("{}/api/schools", server.base_url))
        .query(&[("id", id.to_string())])
        .bearer_auth(&admin)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.json::<Value>().await?,
        json!({ "message": format!("School with id {} deleted", id) })
    );

    let res = client
        .get(format!("{}/api/schools", server.base_url))
        .query(&[("id", id.to_string())])
        .bearer_auth(&user)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn delete_of_missing_id_keeps_existing_rows() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let admin = common::admin_token();

    let res = client
        .post(format!("{}/api/schools/post", server.base_url))
        .query(&[
            ("name", "Goleta Valley Junior High"),
            ("address", "6100 Stow Canyon Rd"),
            ("description", "7-8 junior high"),
        ])
        .bearer_auth(&admin)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let id = res.json::<Value>().await?["id"].as_i64().unwrap();

    let res = client
        .delete(format!("{}/api/schools", server.base_url))
        .query(&[("id", "515151")])
        .bearer_auth(&admin)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        res.json::<Value>().await?,
        json!({
            "type": "EntityNotFoundException",
            "message": "School with id 515151 not found",
        })
    );

    // The real row is untouched
    let res = client
        .get(format!("{}/api/schools", server.base_url))
        .query(&[("id", id.to_string())])
        .bearer_auth(common::user_token())
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    Ok(())
}
