use fibre_registry::registry;
use std::rc::Rc;

struct Mailer {
  host: String,
  port: u16,
}

struct Notifier {
  mailer: Rc<Mailer>,
}

impl Notifier {
  fn notify(&self, to: &str) -> String {
    format!("mail to {} via {}:{}", to, self.mailer.host, self.mailer.port)
  }
}

fn main() -> fibre_registry::Result<()> {
  // Configuration values go in up front...
  let mut registry = registry! {
    "smtp_host" => String::from("mail.example.com"),
    "smtp_port" => 587_u16,
  };

  // ...and services pull what they need by id when first resolved.
  registry.add_singleton("mailer", |r| {
    Ok(Mailer {
      host: (*r.get::<String>("smtp_host")?).clone(),
      port: *r.get::<u16>("smtp_port")?,
    })
  });
  registry.add_transient("notifier", |r| Ok(Notifier { mailer: r.get("mailer")? }));

  let notifier = registry.get::<Notifier>("notifier")?;
  println!("{}", notifier.notify("ops@example.com"));
  println!("{:?}", registry);

  Ok(())
}
