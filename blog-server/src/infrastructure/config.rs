use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub posts_file: PathBuf,
    pub public_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".into())
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid PORT: {}", e))?;
        let posts_file = lookup("POSTS_FILE")
            .unwrap_or_else(|| "data/posts.json".into())
            .into();
        let public_dir = lookup("PUBLIC_DIR")
            .unwrap_or_else(|| "public".into())
            .into();

        Ok(Self {
            host,
            port,
            posts_file,
            public_dir,
        })
    }
}
