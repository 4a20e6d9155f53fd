use serde_json::json;

use civilsage::flows::stock::PredictStockFlow;
use civilsage::flows::summary::SummarizeProjectFlow;
use civilsage::flows::tasks::GenerateTasksFlow;
use civilsage::flows::{FlowRegistry, PromptFlow};
use std::sync::Arc;

fn registry() -> FlowRegistry {
    let mut flows = FlowRegistry::new();
    flows.register(Arc::new(PredictStockFlow));
    flows.register(Arc::new(GenerateTasksFlow));
    flows.register(Arc::new(SummarizeProjectFlow));
    flows
}

#[test]
fn registry_resolves_flows_by_id() {
    let flows = registry();
    assert!(flows.get("predict-stock").is_some());
    assert!(flows.get("generate-tasks").is_some());
    assert!(flows.get("summarize-project").is_some());
    assert!(flows.get("nonexistent").is_none());
    assert_eq!(flows.list().len(), 3);
}

#[test]
fn stock_prompt_renders_all_inputs() {
    let input = json!({
        "material_name": "Cement",
        "initial_stock_level": 120.0,
        "daily_usage_rate": 5.5,
        "lead_time_days": 7,
        "project_id": "PROJ-001"
    });

    let prompt = PredictStockFlow.render_prompt(&input);

    assert!(prompt.contains("Material Name: Cement"));
    assert!(prompt.contains("Initial Stock Level: 120.0"));
    assert!(prompt.contains("Daily Usage Rate: 5.5"));
    assert!(prompt.contains("Lead Time (Days): 7"));
    assert!(prompt.contains("Project ID: PROJ-001"));
    assert!(!prompt.contains("{{"), "unrendered placeholder: {prompt}");
}

#[test]
fn tasks_prompt_embeds_goal() {
    let prompt = GenerateTasksFlow.render_prompt(&json!({ "goal": "Replace the weir gates" }));
    assert!(prompt.contains("Goal: Replace the weir gates"));
    assert!(!prompt.contains("{{"));
}

#[test]
fn summary_prompt_expands_task_list() {
    let input = json!({
        "name": "Suburban Bridge",
        "description": "A two-lane concrete bridge.",
        "progress": 40,
        "budget": 1200000.0,
        "spent": 600000.0,
        "status": "Delayed",
        "tasks": [
            { "id": "TASK-201", "title": "Complete foundation piling", "status": "Done", "due_date": "2024-07-10" },
            { "id": "TASK-202", "title": "Pour concrete columns", "status": "In Progress", "due_date": "2024-07-30" }
        ]
    });

    let prompt = SummarizeProjectFlow.render_prompt(&input);

    assert!(prompt.contains("Project Name: Suburban Bridge"));
    assert!(prompt.contains("Progress: 40%"));
    assert!(prompt.contains("- Complete foundation piling (Status: Done, Due: 2024-07-10)"));
    assert!(prompt.contains("- Pour concrete columns (Status: In Progress, Due: 2024-07-30)"));
    assert!(!prompt.contains("{{"), "unrendered placeholder: {prompt}");
}

#[test]
fn summary_prompt_with_no_tasks_renders_empty_block() {
    let input = json!({
        "name": "City Park Renovation",
        "description": "Park renovation.",
        "progress": 100,
        "budget": 500000.0,
        "spent": 480000.0,
        "status": "Completed",
        "tasks": []
    });

    let prompt = SummarizeProjectFlow.render_prompt(&input);
    assert!(prompt.contains("Tasks:\n\n"));
}

#[test]
fn output_schemas_name_required_fields() {
    let schema = PredictStockFlow.output_schema();
    let required: Vec<&str> = schema["required"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(
        required,
        vec!["predicted_depletion_date", "reorder_quantity", "reorder_alert"]
    );

    let schema = GenerateTasksFlow.output_schema();
    assert_eq!(schema["properties"]["tasks"]["type"], "array");
}
