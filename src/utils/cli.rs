use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub(crate) struct Args {
    /// Bucket to browse
    #[arg(long, env = "BUCKETVIEW_S3_BUCKET", default_value = "")]
    pub(crate) bucket: String,

    /// Object storage endpoint URL
    #[arg(long, env = "BUCKETVIEW_S3_ENDPOINT", default_value = "")]
    pub(crate) s3_endpoint: String,

    /// Access key credential
    #[arg(long, env = "BUCKETVIEW_S3_ACCESS_KEY", default_value = "")]
    pub(crate) s3_access_key: String,

    /// Secret key credential
    #[arg(long, env = "BUCKETVIEW_S3_SECRET_KEY", default_value = "")]
    pub(crate) s3_secret_key: String,

    /// Region handed to the storage client
    #[arg(long, env = "BUCKETVIEW_S3_REGION", default_value = "us-east-1")]
    pub(crate) s3_region: String,

    /// Listening host
    #[arg(long, env = "BUCKETVIEW_HOST", default_value = "0.0.0.0")]
    pub(crate) host: String,

    /// Listening port
    #[arg(short, long, env = "BUCKETVIEW_PORT", default_value_t = 8080)]
    pub(crate) port: u16,

    /// Timeout in seconds for storage list/open calls, 0 disables it
    #[arg(long, env = "BUCKETVIEW_OP_TIMEOUT_SECS", default_value_t = 0)]
    pub(crate) op_timeout_secs: u64,
}
