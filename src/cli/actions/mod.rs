pub mod server;

use std::path::PathBuf;

#[derive(Debug)]
pub enum Action {
    Server {
        port: u16,
        dsn: String,
        images_dir: PathBuf,
        origin: String,
    },
}
