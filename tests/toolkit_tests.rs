use component_toolkit::{
    Component, ComponentToolProvider, ComponentToolkit, InputSpec, OutputSpec, ToolProvider,
    ToolkitError,
};
use serde_json::json;
use std::sync::Arc;

fn search_component() -> Arc<Component> {
    Arc::new(
        Component::new("WebSearch", "searches the web and fetches pages")
            .with_input(
                InputSpec::text("api_key")
                    .required()
                    .with_info("API key for the search backend"),
            )
            .with_input(
                InputSpec::new("query")
                    .with_input_types(&["Message", "str"])
                    .required()
                    .with_info("The search query"),
            )
            .with_input(InputSpec::integer("max_results").with_value(json!(5)))
            .with_input(InputSpec::text("url"))
            .with_output(OutputSpec::new("results", "search").with_required_inputs(&["query", "max_results"]))
            .with_output(OutputSpec::new("page", "fetch_page").with_required_inputs(&["url"]))
            .with_method("search", |state| {
                let query = state
                    .value("query")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_string();
                let max = state
                    .value("max_results")
                    .and_then(|v| v.as_i64())
                    .unwrap_or(5);
                Ok(json!({ "query": query, "count": max }))
            })
            .with_method("fetch_page", |state| {
                let url = state
                    .value("url")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_string();
                Ok(json!({ "url": url, "body": "" }))
            }),
    )
}

#[test]
fn synthesizes_one_tool_per_output_in_declaration_order() {
    let tools = ComponentToolkit::new(search_component()).get_tools().unwrap();

    assert_eq!(tools.len(), 2);
    assert_eq!(tools[0].name, "WebSearch-search");
    assert_eq!(tools[1].name, "WebSearch-fetch_page");
    assert_eq!(
        tools[0].description,
        "search(max_results: int, query: Message | str) - searches the web and fetches pages"
    );
    assert_eq!(
        tools[1].description,
        "fetch_page(url: str) - searches the web and fetches pages"
    );
}

#[test]
fn schema_documents_carry_property_descriptions() {
    let tools = ComponentToolkit::new(search_component()).get_tools().unwrap();
    let document = tools[0].schema().document();

    assert_eq!(
        document["properties"]["query"]["description"],
        json!("The search query")
    );
    // The union contains the graph type `Message`, so the property stays
    // unconstrained rather than rejecting structured message payloads
    assert!(document["properties"]["query"].get("type").is_none());
    assert_eq!(document["properties"]["max_results"]["type"], json!("integer"));
}

#[test]
fn sibling_tools_share_component_state() {
    let component = search_component();
    let tools = ComponentToolkit::new(component.clone()).get_tools().unwrap();

    tools[0]
        .call(&json!({ "query": "rust", "max_results": 2 }))
        .unwrap();

    // The sibling tool observes the state the first call applied
    let specs = component.input_specs().unwrap();
    assert_eq!(
        specs.iter().find(|i| i.name == "query").unwrap().value,
        json!("rust")
    );
}

#[test]
fn interleaved_calls_never_observe_each_others_arguments() {
    let component = Arc::new(
        Component::new("Echo", "returns its argument")
            .with_input(InputSpec::integer("value").required())
            .with_output(OutputSpec::new("echoed", "echo").with_required_inputs(&["value"]))
            .with_method("echo", |state| {
                Ok(state.value("value").cloned().unwrap_or(json!(null)))
            }),
    );
    let tools = ComponentToolkit::new(component).get_tools().unwrap();
    let tool = Arc::new(tools.into_iter().next().unwrap());

    let mut handles = Vec::new();
    for worker in 0..4i64 {
        let tool = Arc::clone(&tool);
        handles.push(std::thread::spawn(move || {
            for i in 0..100i64 {
                let value = worker * 1000 + i;
                let result = tool.call(&json!({ "value": value })).unwrap();
                // Applying the argument and reading it back happen under one
                // lock, so no other in-flight call can overwrite it first
                assert_eq!(result, json!(value));
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
}

#[tokio::test]
async fn provider_lists_descriptors_sorted_by_name() {
    let provider = ComponentToolProvider::new();
    provider.register_component(search_component()).unwrap();

    let descriptors = provider.list_tools().await.unwrap();
    assert_eq!(descriptors.len(), 2);
    assert_eq!(descriptors[0].name, "WebSearch-fetch_page");
    assert_eq!(descriptors[1].name, "WebSearch-search");

    // Descriptors serialize for the wire
    let wire = serde_json::to_value(&descriptors[1]).unwrap();
    assert_eq!(wire["name"], json!("WebSearch-search"));
    assert_eq!(wire["input_schema"]["type"], json!("object"));
}

#[tokio::test]
async fn provider_surfaces_invocation_errors_to_the_caller() {
    let provider = ComponentToolProvider::new();
    provider.register_component(search_component()).unwrap();

    let result = provider
        .call_tool("WebSearch-search", &json!({ "query": "rust", "bogus": 1 }))
        .await;
    assert!(matches!(result, Err(ToolkitError::InvalidArguments(_))));

    // The failed call did not corrupt state for later calls
    let result = provider
        .call_tool("WebSearch-search", &json!({ "query": "rust", "max_results": 1 }))
        .await
        .unwrap();
    assert_eq!(result["count"], json!(1));
}
