use crate::server::error::Error;

pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        Ok(Self {
            database_url: var("DATABASE_URL")
                .ok_or_else(|| Error::MissingEnvVar("DATABASE_URL".to_string()))?,
            listen_addr: var("LISTEN_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect MissingEnvVar when the database URL is not set
    #[test]
    fn requires_database_url() {
        let result = Config::from_lookup(|_| None);

        assert!(matches!(result, Err(Error::MissingEnvVar(name)) if name == "DATABASE_URL"));
    }

    /// Expect the listen address to default when only the database URL is set
    #[test]
    fn listen_addr_defaults() {
        let config = Config::from_lookup(|name| {
            (name == "DATABASE_URL").then(|| "postgres://localhost/campus".to_string())
        })
        .unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:8080");
    }
}
