use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn write_form_json(path: &Path) -> Result<(), Error> {
    let json = r#"{
        "tabs": [
            {
                "title": "Pricing",
                "fields": [{"name": "price", "friendly_name": "Price"}]
            }
        ],
        "dynamic_forms": {
            "shipping": {
                "fields": [{"name": "postalCode", "friendly_name": "Postal Code"}]
            }
        }
    }"#;
    std::fs::write(path, json)
}

pub fn write_errors_csv(path: &Path, rows: &[(&str, &str)]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["field", "code"])?;
    for (field, code) in rows {
        wtr.write_record([*field, *code])?;
    }

    wtr.flush()?;
    Ok(())
}
