//! Basic example demonstrating the Freelancer API client.
//!
//! Run with:
//! ```
//! FREELANCER_OAUTH_TOKEN=your-token cargo run --example basic
//! ```

use freelancerapi::{
    get_bids, search_projects, FreelancerClient, Get, Project, SearchProjectsQuery,
};

#[tokio::main]
async fn main() -> freelancerapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating Freelancer client...");
    let client = FreelancerClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    // Search active projects
    println!("\n--- Searching Active Projects ---");
    let projects = search_projects(
        &client,
        &SearchProjectsQuery {
            query: Some("website".to_string()),
            limit: 10,
            ..Default::default()
        },
    )
    .await?;
    println!("Found {} projects", projects.len());

    for project in &projects {
        println!(
            "  - {} ({:?})",
            project.title.as_deref().unwrap_or("untitled"),
            project.id
        );
    }

    // Get details for the first result
    if let Some(id) = projects.first().and_then(|p| p.id) {
        println!("\n--- Project Details ---");
        let project = Project::get(&client, id).await?;
        println!("Project: {}", project.title.as_deref().unwrap_or("untitled"));
        println!("  ID: {:?}", project.id);
        println!("  Status: {}", project.status.as_deref().unwrap_or("unknown"));
        if let Some(budget) = &project.budget {
            println!("  Budget: {:?} - {:?}", budget.minimum, budget.maximum);
        }

        // List bids on it
        println!("\n--- Bids ---");
        let bids = get_bids(&client, &[("project_id", id.to_string())]).await?;
        println!("Found {} bids", bids.len());

        for (i, bid) in bids.iter().take(5).enumerate() {
            println!(
                "  {}. {:?} for {:?} in {:?} days",
                i + 1,
                bid.bidder_id,
                bid.amount,
                bid.period
            );
        }
    }

    println!("\nDone!");
    Ok(())
}
