use anyhow::{Result, ensure};
use chrono::Local;
use clap::Parser;
use reqwest::Client;

use reviews::{
    review::{Review, ReviewDraft, Scores},
    score::{AverageScores, display_score},
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Base URL of a running server, e.g. http://localhost:1111
    base_url: String,

    /// Sign-in key matching the server's SIGNIN_KEY secret
    signin_key: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = Client::new();

    let login: serde_json::Value = client
        .post(format!("{}/login", args.base_url))
        .json(&serde_json::json!({ "key": args.signin_key }))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    let token = login["token"]
        .as_str()
        .expect("login response missing token")
        .to_string();
    println!("Signed in");

    let draft = sample_draft();
    let created: Review = client
        .post(format!("{}/reviews", args.base_url))
        .bearer_auth(&token)
        .json(&draft)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    println!(
        "Created {} with total {}",
        created.id,
        display_score(created.total_score)
    );

    let listed: Vec<Review> = client
        .get(format!("{}/reviews", args.base_url))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    println!("Listed {} reviews", listed.len());
    ensure!(
        listed.iter().any(|review| review.id == created.id),
        "created review missing from listing"
    );

    let fetched: Review = client
        .get(format!("{}/reviews/{}", args.base_url, created.id))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    ensure!(fetched == created, "detail fetch does not match insert");
    println!("Fetched {}", fetched.theme_name);

    let averages: AverageScores = client
        .get(format!("{}/averages", args.base_url))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    println!("Corpus fun average: {}", display_score(averages.fun));

    let mut revised = draft.clone();
    revised.scores = Some(Scores {
        fun: 9.0,
        completion: 9.0,
        immersion: 9.0,
        price: 9.0,
        design: 9.0,
    });
    let updated: Review = client
        .put(format!("{}/reviews/{}", args.base_url, created.id))
        .bearer_auth(&token)
        .json(&revised)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    ensure!(updated.total_score == 9.0, "update did not recompute total");
    ensure!(
        updated.created_at == created.created_at,
        "update lost createdAt"
    );
    println!("Updated total to {}", display_score(updated.total_score));

    client
        .delete(format!("{}/reviews/{}", args.base_url, created.id))
        .bearer_auth(&token)
        .send()
        .await?
        .error_for_status()?;
    let gone = client
        .get(format!("{}/reviews/{}", args.base_url, created.id))
        .send()
        .await?
        .status();
    ensure!(gone == 404, "deleted review still readable: {gone}");
    println!("Deleted {}", created.id);

    println!("All checks passed");

    Ok(())
}

fn sample_draft() -> ReviewDraft {
    ReviewDraft {
        theme_name: "Tester Theme".to_string(),
        venue: "Tester Venue".to_string(),
        region: "Tester Region".to_string(),
        genres: vec!["smoke".to_string()],
        visit_date: Local::now().date_naive(),
        participants: 2,
        success: true,
        hints_used: 1,
        time_remaining: 7,
        scores: Some(Scores {
            fun: 8.0,
            completion: 7.0,
            immersion: 9.0,
            price: 6.0,
            design: 8.0,
        }),
        difficulty: Some(6.0),
        horror: Some(1.0),
        activity: Some(4.0),
        device_ratio: Some(7.0),
        notes: Some("End-to-end smoke review.".to_string()),
    }
}
