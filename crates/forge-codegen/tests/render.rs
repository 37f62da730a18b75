//! Integration tests: full configuration to rendered package.

use forge_codegen::{render, render_package};
use forge_core::{Constraints, Parameter, ParameterType, ServerConfig, ServerType, Tool};

fn weather_config(ty: ServerType) -> ServerConfig {
    ServerConfig::new(
        "Weather Data Provider",
        ty,
        "Weather forecast data for any location",
        vec![
            Tool::new(
                "get current weather",
                "Fetches current conditions",
                vec![
                    Parameter::new("city name", ParameterType::String, "City to query"),
                    Parameter::new("unit", ParameterType::Enum, "Temperature unit")
                        .with_constraints(Constraints {
                            enum_values: Some(vec![
                                "celsius".to_string(),
                                "fahrenheit".to_string(),
                            ]),
                            required: Some(false),
                            default: Some(serde_json::json!("celsius")),
                            ..Constraints::default()
                        }),
                ],
            ),
            Tool::new(
                "get forecast",
                "Multi-day forecast",
                vec![
                    Parameter::new("city name", ParameterType::String, "City to query"),
                    Parameter::new("days", ParameterType::Integer, "Days ahead")
                        .with_constraints(Constraints {
                            minimum: Some(1.0),
                            maximum: Some(14.0),
                            ..Constraints::default()
                        }),
                ],
            ),
        ],
    )
}

#[test]
fn test_python_package_renders_complete_server() {
    let files = render_package(&weather_config(ServerType::Python)).unwrap();
    assert_eq!(files.len(), 2);

    let source = &files[0];
    assert_eq!(source.filename, "server.py");
    assert!(source.content.contains("name=\"Weather Data Provider\""));
    assert!(source.content.contains("class get_current_weather_params(BaseModel):"));
    assert!(source.content.contains("class get_forecast_params(BaseModel):"));
    assert!(source.content.contains("Literal[\"celsius\", \"fahrenheit\"]"));
    assert!(source.content.contains("ge=1"));
    assert!(source.content.contains("le=14"));
    // Optional defaulted parameter trails the required one
    assert!(source.content.contains(
        "async def get_current_weather(city_name: str, unit: Optional[Literal[\"celsius\", \"fahrenheit\"]] = \"celsius\")"
    ));
    assert_eq!(files[1].filename, "requirements.txt");
}

#[test]
fn test_typescript_package_renders_complete_server() {
    let files = render_package(&weather_config(ServerType::TypeScript)).unwrap();
    assert_eq!(files.len(), 2);

    let source = &files[0];
    assert_eq!(source.filename, "server.js");
    assert!(source.content.contains("server.tool("));
    assert!(source.content.contains("\"get_current_weather\""));
    assert!(source.content.contains("\"get_forecast\""));
    assert!(
        source
            .content
            .contains("z.enum([\"celsius\", \"fahrenheit\"])")
    );
    assert!(source.content.contains(".default(\"celsius\")"));
    assert!(source.content.contains("z.number().int().min(1).max(14)"));

    let manifest: serde_json::Value = serde_json::from_str(&files[1].content).unwrap();
    assert_eq!(manifest["name"], "weather-data-provider");
}

#[test]
fn test_same_config_same_bytes_across_backends_runs() {
    for ty in [ServerType::Python, ServerType::TypeScript] {
        let config = weather_config(ty);
        assert_eq!(render(&config).unwrap(), render(&config).unwrap());
    }
}
