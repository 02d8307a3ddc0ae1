//! Skill Bar Component

use leptos::prelude::*;

use crate::models::Skill;

/// Skill name with a percentage bar
#[component]
pub fn SkillBar(skill: Skill) -> impl IntoView {
    let level = skill.level.min(100);

    view! {
        <div class="rounded-2xl border border-white/10 bg-slate-900/60 p-3">
            <div class="mb-2 flex items-center justify-between text-sm">
                <strong class="text-slate-200">{skill.name}</strong>
                <span class="text-slate-400">{level} "%"</span>
            </div>
            <div class="h-2.5 overflow-hidden rounded-full bg-white/10">
                <div class="h-full rounded-full bg-blue-400" style=format!("width: {}%", level)></div>
            </div>
        </div>
    }
}
