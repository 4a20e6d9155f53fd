use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::models::{Expense, Task};

/// Seed the fixture dataset into an empty store. Idempotent: runs once at
/// startup and inserts nothing when projects already exist. Read handlers
/// never trigger seeding.
pub async fn ensure_seeded(pool: &PgPool) -> Result<(), sqlx::Error> {
    if db::projects::count_all(pool).await? > 0 {
        return Ok(());
    }

    tracing::info!("Empty store detected, seeding fixture data");

    let contractors = seed_contractors(pool).await?;
    let projects = seed_projects(pool, &contractors).await?;
    seed_payments(pool, &projects).await?;
    seed_alerts(pool, &projects).await?;
    seed_activity(pool).await?;

    Ok(())
}

/// Insert fixture contractors (when the table is empty) and return a
/// name -> id map for wiring project assignments.
async fn seed_contractors(pool: &PgPool) -> Result<HashMap<String, Uuid>, sqlx::Error> {
    if db::contractors::count_all(pool).await? == 0 {
        let rows = [
            ("John Doe", "BuildRight Inc.", "Active", 2, "avatar-1"),
            ("Jane Smith", "Innovate Construct", "Active", 1, "avatar-5"),
            ("Mike Johnson", "Foundation Co.", "Inactive", 0, "avatar-3"),
            ("Emily Davis", "SkyHigh Builders", "Active", 1, "avatar-2"),
        ];
        for (name, company, status, count, avatar) in rows {
            db::contractors::create(pool, name, company, status, count, avatar).await?;
        }
    }

    let contractors = db::contractors::list(pool).await?;
    Ok(contractors.into_iter().map(|c| (c.name, c.id)).collect())
}

async fn seed_projects(
    pool: &PgPool,
    contractors: &HashMap<String, Uuid>,
) -> Result<HashMap<String, Uuid>, sqlx::Error> {
    let assigned = |names: &[&str]| -> Vec<String> {
        names
            .iter()
            .filter_map(|n| contractors.get(*n))
            .map(|id| id.to_string())
            .collect()
    };

    let task = |id: &str, title: &str, status: &str, due: &str| Task {
        id: id.to_string(),
        title: title.to_string(),
        status: status.to_string(),
        due_date: due.to_string(),
    };

    let mut ids = HashMap::new();

    let fixtures = [
        (
            "Downtown High-Rise",
            "A 40-story commercial office building in the heart of the city. Features a modern glass facade and sustainable energy systems.",
            75,
            5_000_000.0,
            3_750_000.0,
            "On Track",
            vec![
                task("TASK-101", "Finalize structural steel framework", "Done", "2024-07-20"),
                task("TASK-102", "Install curtain wall panels (Floors 20-30)", "In Progress", "2024-08-15"),
                task("TASK-103", "Begin interior electrical wiring", "To Do", "2024-08-01"),
                task("TASK-104", "HVAC system installation for lower levels", "In Progress", "2024-08-10"),
            ],
            assigned(&["John Doe", "Emily Davis"]),
            vec![
                Expense {
                    id: "EXP-001".to_string(),
                    category: "Materials".to_string(),
                    description: "Structural Steel Beams".to_string(),
                    amount: 1_500_000.0,
                    date: "2024-06-15".to_string(),
                },
                Expense {
                    id: "EXP-002".to_string(),
                    category: "Labor".to_string(),
                    description: "Q2 Contractor Payments".to_string(),
                    amount: 800_000.0,
                    date: "2024-06-30".to_string(),
                },
            ],
        ),
        (
            "Suburban Bridge",
            "A two-lane concrete bridge spanning the Green River, replacing an older, structurally deficient bridge.",
            40,
            1_200_000.0,
            600_000.0,
            "Delayed",
            vec![
                task("TASK-201", "Complete foundation piling on east bank", "Done", "2024-07-10"),
                task("TASK-202", "Pour concrete for main support columns", "In Progress", "2024-07-30"),
                task("TASK-203", "Await delivery of prefabricated deck segments", "To Do", "2024-08-05"),
            ],
            assigned(&["Jane Smith"]),
            vec![],
        ),
        (
            "Residential Complex",
            "A multi-building complex with 200 residential units, a community center, and underground parking.",
            95,
            8_500_000.0,
            8_000_000.0,
            "On Track",
            vec![
                task("TASK-301", "Finalize landscaping and exterior lighting", "In Progress", "2024-08-05"),
                task("TASK-302", "Conduct final unit inspections and punch lists", "In Progress", "2024-08-20"),
                task("TASK-303", "Obtain certificate of occupancy", "To Do", "2024-08-30"),
            ],
            assigned(&["John Doe", "Jane Smith", "Emily Davis"]),
            vec![],
        ),
        (
            "City Park Renovation",
            "Renovation of the central city park, including new playgrounds, a new irrigation system, and refurbishment of public restrooms.",
            100,
            500_000.0,
            480_000.0,
            "Completed",
            vec![
                task("TASK-401", "Install new playground equipment", "Done", "2024-06-15"),
                task("TASK-402", "Complete final project handover", "Done", "2024-07-01"),
            ],
            vec![],
            vec![],
        ),
    ];

    for (name, description, progress, budget, spent, status, tasks, contractors, expenses) in
        fixtures
    {
        let project = db::projects::create(
            pool,
            &db::projects::NewProject {
                name,
                description,
                progress,
                budget,
                spent,
                status,
                tasks: &tasks,
                assigned_contractors: &contractors,
                expenses: &expenses,
            },
        )
        .await?;
        ids.insert(project.name, project.id);
    }

    Ok(ids)
}

async fn seed_payments(
    pool: &PgPool,
    projects: &HashMap<String, Uuid>,
) -> Result<(), sqlx::Error> {
    if db::payments::count_all(pool).await? > 0 {
        return Ok(());
    }

    let rows = [
        ("Downtown High-Rise", "BuildRight Inc.", 50_000.0, "2024-07-15", "Paid", "INV-1023"),
        ("Suburban Bridge", "Innovate Construct", 25_000.0, "2024-07-20", "Pending", "INV-1024"),
        ("Residential Complex", "SkyHigh Builders", 120_000.0, "2024-06-30", "Paid", "INV-1020"),
        ("Downtown High-Rise", "BuildRight Inc.", 75_000.0, "2024-08-01", "Pending", "INV-1025"),
    ];

    for (project_name, contractor_name, amount, date, status, invoice_id) in rows {
        let Some(&project_id) = projects.get(project_name) else {
            continue;
        };
        db::payments::create(
            pool,
            project_id,
            project_name,
            contractor_name,
            amount,
            fixture_date(date),
            status,
            invoice_id,
        )
        .await?;
    }

    Ok(())
}

async fn seed_alerts(pool: &PgPool, projects: &HashMap<String, Uuid>) -> Result<(), sqlx::Error> {
    if db::alerts::count_all(pool).await? > 0 {
        return Ok(());
    }

    let rows = [
        (
            "delay",
            "Potential Delay Detected",
            "Foundation work is 5 days behind schedule due to material delivery issues.",
            "Suburban Bridge",
            "2024-07-28T10:00:00Z",
            false,
        ),
        (
            "stock",
            "Low Stock: Cement",
            "Stock for cement is below the 15% threshold. Reorder is recommended.",
            "Downtown High-Rise",
            "2024-07-27T14:30:00Z",
            false,
        ),
        (
            "payment",
            "Overdue Payment",
            "Invoice INV-1024 to Innovate Construct is 3 days overdue.",
            "Suburban Bridge",
            "2024-07-26T09:00:00Z",
            true,
        ),
        (
            "safety",
            "Upcoming safety inspection required",
            "Upcoming safety inspection for scaffolding on floor 15.",
            "Downtown High-Rise",
            "2024-07-25T11:00:00Z",
            true,
        ),
    ];

    for (kind, title, description, project_name, date, read) in rows {
        let Some(&project_id) = projects.get(project_name) else {
            continue;
        };
        db::alerts::create(
            pool,
            kind,
            title,
            description,
            project_id,
            fixture_timestamp(date),
            read,
        )
        .await?;
    }

    Ok(())
}

async fn seed_activity(pool: &PgPool) -> Result<(), sqlx::Error> {
    if db::recent_activity::count_all(pool).await? > 0 {
        return Ok(());
    }

    let rows = [
        ("Supervisor Mark", "submitted daily report for Downtown High-Rise.", "2024-07-29T14:00:00Z"),
        ("Admin", "approved payment for INV-1023.", "2024-07-29T11:00:00Z"),
        ("System", "generated a low stock alert for Steel Beams.", "2024-07-28T09:00:00Z"),
        ("Jane Smith", "updated task \"Electrical Wiring\" to Completed.", "2024-07-27T16:00:00Z"),
    ];

    for (actor, action, time) in rows {
        db::recent_activity::create(pool, actor, action, fixture_timestamp(time)).await?;
    }

    Ok(())
}

fn fixture_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("fixture date literal")
}

fn fixture_timestamp(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("fixture timestamp literal")
        .with_timezone(&Utc)
}
