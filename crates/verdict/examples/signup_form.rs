//! Validates a signup form and prints the report the way an HTTP handler
//! would return it.
//!
//! Run with `RUST_LOG=verdict=trace cargo run --example signup_form` to see
//! the engine's tracing output.

use tracing_subscriber::EnvFilter;
use verdict::prelude::*;

struct Signup {
    username: String,
    email: String,
    age: u32,
    plan: String,
}

fn username() -> Validator<str> {
    Validator::new()
        .must(required(), "Username is required")
        .must(length_between(3, 20), "Username must be 3 to 20 characters")
        .must(
            |s: &str| s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
            "Username may contain letters, digits and underscores",
        )
}

fn email() -> Result<Validator<str>, VerdictError> {
    Ok(Validator::new()
        .must(required(), "Email is required")
        .must(pattern(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")?, "Email is invalid"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let signup = ValidationBuilder::<Signup>::new()
        .field("Username", |s: &Signup| s.username.as_str(), username())
        .field("Email", |s: &Signup| s.email.as_str(), email()?)
        .field(
            "Age",
            |s: &Signup| &s.age,
            Validator::<u32>::new().must(in_range(13u32, 130), "Age must be between 13 and 130"),
        )
        .field(
            "Plan",
            |s: &Signup| s.plan.as_str(),
            Validator::<str>::new().must(one_of(["free", "pro", "team"]), "Unknown plan"),
        );

    let form = Signup {
        username: "a!".to_string(),
        email: "not-an-email".to_string(),
        age: 9,
        plan: "pro".to_string(),
    };

    let result = signup.validate(&form);
    println!("{result}");
    println!("{}", serde_json::to_string_pretty(&result)?);

    for (field, messages) in result.to_error_dictionary() {
        println!("{field}: {}", messages.join("; "));
    }

    Ok(())
}
