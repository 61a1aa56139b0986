pub fn start_message(first_name: &str) -> String {
    format!(
        "Привет, {}! 👋\n\n\
        Добро пожаловать в марафоны Bodyline.\n\
        Здесь можно записаться на марафон, заполнить анкету и следить за прогрессом.\n\n\
        Нажми кнопку ниже, чтобы открыть мини-приложение.",
        first_name
    )
}
