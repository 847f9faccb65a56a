use respond_impl::{RecordingSink, ResponseBuilder, NO_PAYLOAD};
use serde::Serialize;

#[derive(Serialize)]
struct User {
    id: u32,
    name: &'static str,
    email: &'static str,
}

fn list_users(sink: &mut RecordingSink) -> respond_impl::Result<()> {
    let users = [
        User { id: 1, name: "Billy", email: "billy@example.com" },
        User { id: 2, name: "Joan", email: "joan@example.com" },
    ];
    ResponseBuilder::new(sink).ok(Some(&users))
}

fn delete_user(sink: &mut RecordingSink) -> respond_impl::Result<()> {
    ResponseBuilder::new(sink).no_content(NO_PAYLOAD)
}

fn main() -> respond_impl::Result<()> {
    let mut sink = RecordingSink::new();
    list_users(&mut sink)?;
    println!("GET /users:");
    println!("{}", String::from_utf8_lossy(sink.raw_bytes()));

    let mut sink = RecordingSink::new();
    delete_user(&mut sink)?;
    println!("DELETE /users/1:");
    println!("{}", String::from_utf8_lossy(sink.raw_bytes()));

    Ok(())
}
