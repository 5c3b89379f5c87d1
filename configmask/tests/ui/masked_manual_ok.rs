use configmask::{
    BoxError, DisplayField, FieldMeta, FieldVisitor, MaskField, Maskable, to_masked_json,
    to_safe_map,
};

struct Token(String);

impl MaskField for Token {
    fn display_value(&self) -> String {
        self.0.clone()
    }

    fn encode_masked(&self) -> Option<Result<String, BoxError>> {
        Some(Ok(format!("\"len:{}\"", self.0.len())))
    }
}

struct Manual {
    host: String,
    token: Token,
    port: u16,
}

impl Maskable for Manual {
    fn walk_fields(&self, visitor: &mut dyn FieldVisitor) {
        const TOKEN: FieldMeta = FieldMeta::new("token").with_key("apiToken").sensitive();

        visitor.visit_field(&FieldMeta::new("host"), &self.host);
        visitor.visit_field(&TOKEN, &self.token);
        visitor.visit_field(&FieldMeta::new("port"), &DisplayField(&self.port));
    }
}

fn main() {
    let manual = Manual {
        host: "h".into(),
        token: Token("t".into()),
        port: 1,
    };
    let _ = to_safe_map(&manual);
    let _ = to_masked_json(&manual);
}
