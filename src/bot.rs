//! 固定菜单应答

pub const OPTION_ONE: &str = "Opção 1: Confira nossos produtos exclusivos para gatos!";
pub const OPTION_TWO: &str = "Opção 2: Entre em contato conosco pelo telefone: (11) 9999-9999.";
pub const OPTION_THREE: &str = "Opção 3: Acesse nosso site para mais informações!";
pub const FALLBACK: &str = "Desculpe, não entendi. Escolha: 1, 2 ou 3.";

/// 根据用户输入查找回复。只做小写归一化，不去除空白
pub fn lookup_response(input: &str) -> &'static str {
    match input.to_lowercase().as_str() {
        "1" => OPTION_ONE,
        "2" => OPTION_TWO,
        "3" => OPTION_THREE,
        _ => FALLBACK,
    }
}
