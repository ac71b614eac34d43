//! UI chrome strings for the two supported display languages.
//!
//! Tool descriptions and module titles carry their own per-locale text in
//! [`crate::models::LocalizedText`]; everything else rendered by the UI
//! comes from the table below.

use crate::models::Locale;

/// All translatable UI strings
pub struct Strings {
    pub search_placeholder: &'static str,
    pub add_tool: &'static str,
    pub all: &'static str,
    pub operational: &'static str,
    pub latency: &'static str,
    pub active_nodes: &'static str,
    pub daily_requests: &'static str,
    pub uptime: &'static str,
    pub new_release: &'static str,
    pub next_gen_title: &'static str,
    pub next_gen_desc: &'static str,
    pub compute_hub: &'static str,
    pub compute_desc: &'static str,
    pub global_api: &'static str,
    pub global_desc: &'static str,
    pub interface: &'static str,
    pub accent_color: &'static str,
    pub language: &'static str,
    pub login: &'static str,
    pub logout: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub chat_title: &'static str,
    pub chat_placeholder: &'static str,
    pub chat_empty: &'static str,
    pub chat_fallback: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

const ZH: Strings = Strings {
    search_placeholder: "搜索 AI 工具、模型或文档...",
    add_tool: "添加工具",
    all: "全部",
    operational: "运行正常",
    latency: "网络延迟",
    active_nodes: "活跃节点",
    daily_requests: "每日请求",
    uptime: "运行时间",
    new_release: "新品发布",
    next_gen_title: "下一代神经引擎",
    next_gen_desc: "通过我们最新的分布式计算架构体验前所未有的推理速度。",
    compute_hub: "计算枢纽",
    compute_desc: "管理您的 GPU 集群和推理端点。",
    global_api: "全球 API",
    global_desc: "全球 40 多个地区低延迟访问。",
    interface: "界面设置",
    accent_color: "强调色",
    language: "语言",
    login: "登录",
    logout: "注销",
    email: "邮箱",
    password: "密码",
    chat_title: "AI 智能助手",
    chat_placeholder: "向 AI 提问...",
    chat_empty: "今天有什么可以帮您？",
    chat_fallback: "系统错误: 无法连接至 AI 服务后台",
    name: "名称",
    url: "链接",
    description: "描述",
    category: "分类",
};

const EN: Strings = Strings {
    search_placeholder: "Search AI tools, models, or documentation...",
    add_tool: "Add Tool",
    all: "All",
    operational: "Operational",
    latency: "Network Latency",
    active_nodes: "Active Nodes",
    daily_requests: "Daily Requests",
    uptime: "Uptime",
    new_release: "New Release",
    next_gen_title: "Next-Gen Neural Engine",
    next_gen_desc: "Experience unprecedented inference speeds with our latest distributed computing architecture.",
    compute_hub: "Compute Hub",
    compute_desc: "Manage your GPU clusters and inference endpoints.",
    global_api: "Global API",
    global_desc: "Low-latency access from 40+ regions worldwide.",
    interface: "Interface",
    accent_color: "Accent Color",
    language: "Language",
    login: "Log In",
    logout: "Log Out",
    email: "Email",
    password: "Password",
    chat_title: "AI Assistant",
    chat_placeholder: "Ask AI anything...",
    chat_empty: "How can I help you today?",
    chat_fallback: "System error: unable to reach the AI service backend",
    name: "Name",
    url: "URL",
    description: "Description",
    category: "Category",
};

/// Look up the string table for a locale
pub fn strings(locale: Locale) -> &'static Strings {
    match locale {
        Locale::Zh => &ZH,
        Locale::En => &EN,
    }
}
