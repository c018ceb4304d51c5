//! API endpoint URL builders

/// Build the instance endpoint URL for a UUID within a space
pub fn instance_url(base_url: &str, uuid: &str, space: &str) -> String {
    format!("{}/instances/{}?space={}", base_url, uuid, space)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_url() {
        let url = instance_url(
            "https://core.kg.ebrains.eu/v3-beta",
            "5f0a3f51-92a5-4e43-8cbb-5a2b78dc54cf",
            "dataset",
        );
        assert_eq!(
            url,
            "https://core.kg.ebrains.eu/v3-beta/instances/5f0a3f51-92a5-4e43-8cbb-5a2b78dc54cf?space=dataset"
        );
    }
}
