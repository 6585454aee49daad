#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub bucket: String,
    pub endpoint: String,
    pub access_key: String,
    pub secret_key: String,
    pub region: String,
    pub op_timeout_secs: u64,
}
