use envrec::config::{ConfigSchema, DotenvFile, Loader, ProcessEnv, TypeTag};
use envrec::{init_logging, AppContext, Error};

fn main() -> Result<(), Error> {
    init_logging("info")?;

    // Declared once, in the order errors should be reported in.
    let schema = ConfigSchema::builder()
        .required("PROD", TypeTag::Bool)
        .required("PORT", TypeTag::Int)
        .optional("SMTP_HOST", TypeTag::String)
        .optional("ALLOWED_HOSTS", TypeTag::StringList)
        .required(
            "WORKERS",
            TypeTag::Union(vec![TypeTag::Int, TypeTag::String]),
        )
        .build();

    // Real environment variables win over the .env file.
    let record = Loader::new(schema)
        .with_source(DotenvFile::new(".env", false))
        .with_source(ProcessEnv)
        .load()?;

    let ctx = AppContext::builder().with_config(record).build()?;

    let config = ctx.config();
    println!(
        "prod={:?} port={:?} workers={:?}",
        config.get_bool("PROD"),
        config.get_int("PORT"),
        config.get("WORKERS"),
    );

    if ctx.shutdown().is_requested() {
        println!("shutting down");
    }

    Ok(())
}
