#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    todolist_server_lib::run().await
}
