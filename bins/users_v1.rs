fn main() -> std::process::ExitCode {
    server::launch::<models::UserV1>("users_v1", "sqlite://db/mydatabase.db?mode=rwc")
}
