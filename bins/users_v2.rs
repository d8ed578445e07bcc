fn main() -> std::process::ExitCode {
    server::launch::<models::UserV2>("users_v2", "sqlite://db/mydatabase2.db?mode=rwc")
}
