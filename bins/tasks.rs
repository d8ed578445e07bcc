fn main() -> std::process::ExitCode {
    server::launch::<models::Task>("tasks", "sqlite://db/mydatabase3.db?mode=rwc")
}
