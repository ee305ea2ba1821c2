#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_schema_generation() {
        // Test that the OpenAPI schema can be generated without errors
        let openapi = ApiDoc::openapi();

        // Verify that the schema contains the expected components
        assert!(openapi.components.is_some());
        let components = openapi.components.as_ref().unwrap();

        assert!(components.schemas.contains_key("ErrorResponse"));
        assert!(components.schemas.contains_key("HealthResponse"));
        assert!(components.schemas.contains_key("StationDataPayload"));

        // Verify that the schema can be serialized to JSON without errors
        let json_result = serde_json::to_string(&openapi);
        assert!(json_result.is_ok());
    }

    #[test]
    fn test_payload_schema_structure() {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.as_ref().unwrap();
        let payload_schema = components.schemas.get("StationDataPayload").unwrap();

        // Verify the payload keeps its camelCase wire names
        if let utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::Object(obj)) =
            payload_schema
        {
            let properties = &obj.properties;
            assert!(properties.contains_key("availability"));
            assert!(properties.contains_key("hourlyUsage"));
            assert!(properties.contains_key("predictions"));
            assert!(properties.contains_key("actualValues"));
            assert!(properties.contains_key("forecast"));
        } else {
            panic!("StationDataPayload should be an object schema");
        }
    }

    #[test]
    fn test_openapi_paths_contain_core_endpoints() {
        let openapi = ApiDoc::openapi();

        assert!(openapi.paths.paths.contains_key("/health"));
        assert!(openapi.paths.paths.contains_key("/api/station-data"));
        assert!(openapi.paths.paths.contains_key("/api/v1/stations"));

        let payload_path = openapi.paths.paths.get("/api/station-data").unwrap();
        let payload_get = payload_path
            .operations
            .get(&utoipa::openapi::PathItemType::Get);
        assert!(payload_get.is_some());

        let responses = &payload_get.unwrap().responses;
        // Check that both 200 and 500 responses are defined
        assert!(responses.responses.contains_key("200"));
        assert!(responses.responses.contains_key("500"));
    }
}
