use serde::{Deserialize, Serialize};

tag_enum! {
    pub enum ApiStyle {
        Rest => "REST",
        GraphQl => "GraphQL",
        Grpc => "gRPC",
    }
}

tag_enum! {
    pub enum ApiSchemaType {
        OpenApi => "openapi",
    }
}

/// A single endpoint.
///
/// Endpoint extraction is not performed; `ApiAnalysis::endpoints` is always empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEndpoint {
    pub method: String,
    pub path: String,
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSchemaFile {
    pub file: String,
    #[serde(rename = "type")]
    pub schema_type: ApiSchemaType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAnalysis {
    /// Independent style tags, in REST, GraphQL, gRPC order
    pub styles: Vec<ApiStyle>,
    pub route_files: Vec<String>,
    pub endpoints: Vec<ApiEndpoint>,
    pub schemas: Vec<ApiSchemaFile>,
}
