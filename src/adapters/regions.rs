//! Map types the ECharts backend has geometry for.

use crate::domain::model::NATIONAL_MAP_TYPE;

/// (map type, geometry script name under `maps/`)
const REGIONS: &[(&str, &str)] = &[
    (NATIONAL_MAP_TYPE, "china"),
    ("北京", "beijing"),
    ("天津", "tianjin"),
    ("河北", "hebei"),
    ("山西", "shanxi"),
    ("内蒙古", "neimenggu"),
    ("辽宁", "liaoning"),
    ("吉林", "jilin"),
    ("黑龙江", "heilongjiang"),
    ("上海", "shanghai"),
    ("江苏", "jiangsu"),
    ("浙江", "zhejiang"),
    ("安徽", "anhui"),
    ("福建", "fujian"),
    ("江西", "jiangxi"),
    ("山东", "shandong"),
    ("河南", "henan"),
    ("湖北", "hubei"),
    ("湖南", "hunan"),
    ("广东", "guangdong"),
    ("广西", "guangxi"),
    ("海南", "hainan"),
    ("重庆", "chongqing"),
    ("四川", "sichuan"),
    ("贵州", "guizhou"),
    ("云南", "yunnan"),
    ("西藏", "xizang"),
    // "shanxi" is taken by 山西
    ("陕西", "shanxi1"),
    ("甘肃", "gansu"),
    ("青海", "qinghai"),
    ("宁夏", "ningxia"),
    ("新疆", "xinjiang"),
    ("台湾", "taiwan"),
    ("香港", "xianggang"),
    ("澳门", "aomen"),
];

pub fn geometry_script(map_type: &str) -> Option<&'static str> {
    REGIONS
        .iter()
        .find(|(name, _)| *name == map_type)
        .map(|(_, script)| *script)
}
